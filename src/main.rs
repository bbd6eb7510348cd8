// The browser-only state machines are compiled natively for their unit tests.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod contact;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod content;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod gallery;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod i18n;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod nav;
mod seo;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod skills;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod typing;

#[cfg(target_arch = "wasm32")]
mod frontend;
#[cfg(not(target_arch = "wasm32"))]
mod server;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() {
    if let Err(error) = server::run().await {
        eprintln!("server error: {error}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
