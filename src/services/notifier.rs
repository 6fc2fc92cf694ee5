use crate::errors::AppError;

/// Receives failures that should reach the person using the results view.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify_error(&self, context: &str, error: &AppError);
}

/// Reports failures through the application log.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_error(&self, context: &str, error: &AppError) {
        if error.is_data_fault() {
            log::error!("{}: inconsistent result data: {}", context, error);
        } else {
            log::error!("{}: {}", context, error);
        }
    }
}
