//! Message types for the waopen GUI

/// Messages that drive the application
#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),

    // Field interaction (clipboard sniffing)
    FieldHovered(bool),
    PointerPressed,
    InputTapped,
    ClipboardChecked(Option<String>),

    // Actions
    PastePressed,
    Pasted(Option<String>),
    OpenPressed,
    /// Launched URL, or the error text
    LaunchFinished(Result<String, String>),
}
