/// Short messages shown to the user after a tag action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, uniffi::Enum)]
pub enum UserNotice {
    #[display("No NFC Tag detected")]
    NoTagDetected,

    #[display("Text written successfully!")]
    WriteSucceeded,

    #[display("Error during Writing. Try again.")]
    WriteFailed,
}

#[uniffi::export]
fn user_notice_message(notice: UserNotice) -> String {
    notice.to_string()
}
