// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Creating the window failed
    #[error("Window init error: {0}")]
    WindowInit(String),
    /// Pushing the frame buffer to the window surface failed
    #[error("Window update error: {0}")]
    WindowUpdate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure_site() {
        let init = Error::WindowInit("no display".into());
        let update = Error::WindowUpdate("lost surface".into());
        assert_eq!(init.to_string(), "Window init error: no display");
        assert_eq!(update.to_string(), "Window update error: lost surface");
    }
}
