use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaskError {
    #[error("invalid mask key length: {0}")]
    InvalidKeyLength(usize),
}
