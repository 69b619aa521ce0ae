/// Display URL for a bucket: the endpoint and bucket joined verbatim
pub fn public_base_url(endpoint: &str, bucket: &str) -> String {
    format!("{endpoint}/{bucket}/")
}
