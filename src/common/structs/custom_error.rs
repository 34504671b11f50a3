/// Boot-level failure reported before the logger is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomError {
    pub(crate) message: String,
}
