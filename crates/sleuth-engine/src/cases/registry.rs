use crate::cases::manifest::CaseFile;
use crate::error::EngineError;

/// Ordered collection of cases, loaded once at startup.
/// A load failure degrades to an empty registry; the engine then reports
/// that no cases are available instead of crashing.
#[derive(Debug, Clone, Default)]
pub struct CaseRegistry {
    cases: Vec<CaseFile>,
}

impl CaseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cases(cases: Vec<CaseFile>) -> Self {
        Self { cases }
    }

    /// Strict parse of a JSON array of cases.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let cases: Vec<CaseFile> =
            serde_json::from_str(json).map_err(|e| EngineError::CaseLoad(e.to_string()))?;
        Ok(Self { cases })
    }

    /// Parse case data, falling back to an empty registry on failure.
    pub fn load_or_empty(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(registry) => {
                log::info!("loaded {} case(s)", registry.len());
                registry
            }
            Err(err) => {
                log::warn!("could not load case data, continuing with none: {err}");
                Self::new()
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&CaseFile> {
        self.cases.iter().find(|c| c.id == id)
    }

    pub fn first(&self) -> Option<&CaseFile> {
        self.cases.first()
    }

    /// Case for `id`, falling back to the first case when the id is unknown
    /// or absent. `None` only when the registry is empty.
    pub fn resolve(&self, id: Option<&str>) -> Option<&CaseFile> {
        id.and_then(|id| self.get(id)).or_else(|| self.first())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CaseFile> {
        self.cases.iter()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}
