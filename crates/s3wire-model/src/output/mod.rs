//! Response shapes.

mod multipart;
mod object;

pub use multipart::CreateMultipartUploadResult;
pub use object::{DeleteObjectsResult, GetObjectResult, HeadObjectResult};
