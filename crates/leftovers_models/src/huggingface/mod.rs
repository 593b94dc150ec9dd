//! HuggingFace Inference API integration.

mod conversions;
mod driver;
mod dto;

pub use driver::HuggingFaceGenerator;
pub use dto::{
    HubModelInfo, HuggingFaceErrorBody, HuggingFaceOptions, HuggingFaceParameters,
    HuggingFaceRequest, HuggingFaceRequestBuilder, HuggingFaceResponse,
};
