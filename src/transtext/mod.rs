//! TRANSTEXT 方言 (タブ・引用符区切りの CSV) と翻訳カタログの双方向コーデック

mod decode;
mod encode;
mod error;

pub use decode::decode;
pub use encode::encode;
pub use error::{
    EncodeError,
    FormatError,
};
