/// Scaffold mode swaps the model backends for canned collaborators so the
/// service runs without any inference server.
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    pub enabled: bool,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            enabled: std::env::var("SCAFFOLD_MODE")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}
