use versionboard::{config, router};
use wasm_bindgen_futures::spawn_local;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    spawn_local(async move {
        match config::init().await {
            Ok(()) => router::mount_app(),
            Err(err) => log::error!("startup aborted: {}", err),
        }
    });
}
