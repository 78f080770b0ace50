fn main() {
    #[cfg(target_arch = "wasm32")]
    content_admin_frontend::start();
}
