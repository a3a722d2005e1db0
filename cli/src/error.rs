use session::SessionError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("not signed in; run `authctl login` first")]
    NotSignedIn,
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
}
