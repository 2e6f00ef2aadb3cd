/// Point a payment URL at the sandbox environment.
///
/// The first `/pay/` segment becomes `/sandboxnew/pay/` when `is_sandbox`
/// is set; otherwise the URL is returned unchanged.
pub fn sandbox_url(url: &str, is_sandbox: bool) -> String {
    if is_sandbox {
        url.replacen("/pay/", "/sandboxnew/pay/", 1)
    } else {
        url.to_string()
    }
}
