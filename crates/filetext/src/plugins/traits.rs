//! Base plugin trait definition.

use crate::Result;

/// Base trait that all plugins must implement.
///
/// Plugins are stored as `Arc<dyn Trait>` in process-global registries, so
/// they must be `Send + Sync` and take `&self` everywhere. Use interior
/// mutability for any state changed by `initialize` or `shutdown`.
///
/// # Example
///
/// ```rust
/// use filetext::plugins::Plugin;
/// use filetext::Result;
/// use std::sync::atomic::{AtomicBool, Ordering};
///
/// struct MyPlugin {
///     initialized: AtomicBool,
/// }
///
/// impl Plugin for MyPlugin {
///     fn name(&self) -> &str {
///         "my-plugin"
///     }
///
///     fn version(&self) -> String {
///         "1.0.0".to_string()
///     }
///
///     fn initialize(&self) -> Result<()> {
///         self.initialized.store(true, Ordering::Release);
///         Ok(())
///     }
///
///     fn shutdown(&self) -> Result<()> {
///         self.initialized.store(false, Ordering::Release);
///         Ok(())
///     }
/// }
/// ```
pub trait Plugin: Send + Sync {
    /// Unique kebab-case identifier, e.g. `"pdf-extractor"`.
    fn name(&self) -> &str;

    /// Semantic version of this plugin.
    fn version(&self) -> String;

    /// Called once when the plugin is registered. An error aborts registration.
    fn initialize(&self) -> Result<()>;

    /// Called when the plugin is removed from its registry.
    fn shutdown(&self) -> Result<()>;

    /// Optional plugin description for debugging and logging.
    fn description(&self) -> &str {
        ""
    }
}
