use thiserror::Error;

// Calculation paths never construct these: unparsable input and undefined
// arithmetic travel as NaN / None per the calculators' contract. EngineError
// covers startup plumbing only: bad environment configuration and the
// listener's I/O failures.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}
