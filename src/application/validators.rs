/// Accepts anything containing an `@`. The waitlist form only needs to catch
/// obvious typos; deliverability is checked when invites go out.
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@')
}

/// A display name is valid when something other than whitespace remains.
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}
