fn main() {
    // 仅在启用 tauri-app 特性时生成 Tauri 上下文
    #[cfg(feature = "tauri-app")]
    tauri_build::build();
}
