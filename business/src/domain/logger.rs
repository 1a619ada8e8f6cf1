/// Logging port. Domain and application code log through this trait so the
/// choice of backend stays in infrastructure.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
