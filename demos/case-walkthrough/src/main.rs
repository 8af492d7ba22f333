//! Scripted walkthrough: plays one investigation end to end through the
//! action queue, then runs the firework simulation for a few seconds.
//! Stands in for the real UI layer: everything here just renders the
//! structured results the engine hands back.

use glam::Vec2;
use sleuth_engine::answer::spoiler;
use sleuth_engine::{
    ActionQueue, ActionReport, BurstConfig, CaseRegistry, CaseSession, EffectsState,
    Launcher, ParticleBuffer, PlayerAction, RevealState, Step, TargetId,
};

const CASES_JSON: &str = include_str!("../assets/cases.json");

const CLUE_BOX: TargetId = TargetId(0);
const FRAME_DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();

    let registry = CaseRegistry::load_or_empty(CASES_JSON);
    let mut session = CaseSession::new(registry);
    let mut reveals = RevealState::new();

    // The investigation, as the UI would feed it in.
    let mut queue = ActionQueue::new();
    queue.push(PlayerAction::StartCase {
        case_id: Some("case-spinner".into()),
    });
    queue.push(PlayerAction::SubmitAnswer("a deadlock somewhere?".into()));
    queue.push(PlayerAction::SkipToInvestigation);
    queue.push(PlayerAction::Advance(Step::Clues));
    queue.push(PlayerAction::Advance(Step::Clues));
    queue.push(PlayerAction::Advance(Step::Witnesses));
    queue.push(PlayerAction::Advance(Step::Timeline));
    queue.push(PlayerAction::Advance(Step::Culprit));
    queue.push(PlayerAction::Advance(Step::Fix));

    for action in queue.drain() {
        let outcome = match action {
            PlayerAction::StartCase { case_id } => session.start(case_id.as_deref()),
            PlayerAction::Advance(step) => session.advance(step),
            PlayerAction::SubmitAnswer(guess) => session.submit_answer(&guess),
            PlayerAction::SkipToInvestigation => session.skip_to_investigation(),
            PlayerAction::Reset => session.reset(),
            PlayerAction::Burst { .. } | PlayerAction::Launch { .. } => continue,
        };
        match outcome {
            Ok(report) => render(&mut reveals, &report),
            Err(err) => println!("[feedback] {err}"),
        }
    }

    println!("final score: {}", session.state().score);

    // The host masks spoilers itself; the engine only derives the keywords.
    if let (Some(case), Some(keywords)) = (session.active_case(), session.spoiler_keywords()) {
        println!("\ncrime scene (spoilers shielded):");
        println!("{}", spoiler::mask_code_comments(&case.code_buggy, &keywords));
    }

    run_fireworks();
}

/// Print a report the way a DOM layer would render it, typing the revealed
/// text through the typewriter scheduler.
fn render(reveals: &mut RevealState, report: &ActionReport) {
    if let Some(feedback) = &report.feedback {
        println!("[feedback] {feedback}");
    }
    if report.score_delta > 0 {
        println!("[score] +{}", report.score_delta);
    }
    if !report.unlocked.is_empty() {
        println!("[unlocked] {}", report.unlocked);
    }
    if let Some(text) = &report.revealed {
        reveals.start(CLUE_BOX, text, 120.0);
        // Fast-forward the reveal to completion, frame by frame.
        loop {
            let updates = reveals.tick(FRAME_DT);
            match updates.last() {
                Some(update) if update.done => {
                    println!("[reveal] {}", update.visible);
                    break;
                }
                Some(_) => continue,
                None => break,
            }
        }
    }
}

/// Three seconds of celebration: a launcher feeds rockets in, the
/// simulation bursts them, and the instance buffer is rebuilt per frame.
fn run_fireworks() {
    println!("\ncase closed, fireworks:");
    let mut effects = EffectsState::new(42);
    let mut launcher = Launcher::new().with_rate(2.0);
    let mut buffer = ParticleBuffer::new();

    // One celebratory heart burst up front.
    effects.spawn_burst(Vec2::new(400.0, 300.0), &BurstConfig::heart());

    for frame in 0..180 {
        for _ in 0..launcher.tick(FRAME_DT) {
            effects.launch(Vec2::new(400.0, 600.0));
        }
        let stats = effects.tick();
        effects.write_instances(&mut buffer);
        if frame % 30 == 0 || stats.spawned > 0 {
            log::info!(
                "frame {frame:3}: {} active, {} spawned, {} expired",
                buffer.instance_count(),
                stats.spawned,
                stats.expired
            );
        }
    }
    println!("fireworks done: {} particles still falling", effects.active_count());
}
