/// Requests from the UI loop to the actions service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Plays the welcome message once a session exists.
    Welcome,
    /// A line the user submitted, untrimmed.
    Submit(String),
}
