use crate::utils::error::Result;

/// Save mechanism for exported estimates. The core hands over a payload and a
/// file name and does not care where it lands.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}
