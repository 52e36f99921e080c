//! 前端静态资源路由
//!
//! 前端构建产物在编译期通过 rust-embed 嵌入，未命中的路径回退到 `index.html`。
//! 开发时可将文件放入 `./frontend-custom/` 覆盖嵌入版本。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use rust_embed::Embed;
use std::borrow::Cow;
use std::path::Path;

#[derive(Embed)]
#[folder = "frontend/dist/"]
struct FrontendAssets;

const INDEX: &str = "index.html";
const CUSTOM_DIR: &str = "./frontend-custom";

/// 按扩展名推断 MIME 类型，第二项表示是否可长期缓存
fn content_type(path: &str) -> (&'static str, bool) {
    let ext = Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    match ext {
        "html" => ("text/html; charset=utf-8", false),
        "js" | "mjs" => ("application/javascript; charset=utf-8", true),
        "css" => ("text/css; charset=utf-8", true),
        "json" | "map" => ("application/json; charset=utf-8", false),
        "webmanifest" => ("application/manifest+json", false),
        "svg" => ("image/svg+xml", true),
        "png" => ("image/png", true),
        "jpg" | "jpeg" => ("image/jpeg", true),
        "gif" => ("image/gif", true),
        "webp" => ("image/webp", true),
        "ico" => ("image/x-icon", false),
        "woff" => ("font/woff", true),
        "woff2" => ("font/woff2", true),
        "ttf" => ("font/ttf", true),
        "txt" => ("text/plain; charset=utf-8", false),
        "wasm" => ("application/wasm", true),
        _ => ("application/octet-stream", false),
    }
}

fn load(path: &str) -> Option<Cow<'static, [u8]>> {
    // 拒绝路径穿越
    if path.split('/').any(|seg| seg == "..") {
        return None;
    }
    if let Ok(data) = std::fs::read(Path::new(CUSTOM_DIR).join(path)) {
        return Some(Cow::Owned(data));
    }
    FrontendAssets::get(path).map(|file| file.data)
}

pub async fn serve_frontend(req: HttpRequest) -> ActixResult<HttpResponse> {
    let path = req.match_info().query("tail").trim_start_matches('/');

    let resolved = if path.is_empty() {
        load(INDEX).map(|data| (INDEX, data))
    } else {
        load(path)
            .map(|data| (path, data))
            .or_else(|| load(INDEX).map(|data| (INDEX, data)))
    };

    let Some((file, data)) = resolved else {
        return Ok(HttpResponse::NotFound()
            .content_type("text/plain; charset=utf-8")
            .body("Frontend assets are not available. Build the frontend into frontend/dist."));
    };

    let (mime, cacheable) = content_type(file);
    let cache_control = if cacheable {
        "public, max-age=31536000, immutable"
    } else {
        "no-cache, no-store, must-revalidate"
    };

    Ok(HttpResponse::Ok()
        .content_type(mime)
        .insert_header(("Cache-Control", cache_control))
        .body(data.into_owned()))
}

/// 配置前端路由，必须在所有 API 路由之后注册
pub fn configure_frontend_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{tail:.*}", web::get().to(serve_frontend));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type() {
        assert_eq!(content_type("index.html"), ("text/html; charset=utf-8", false));
        assert_eq!(
            content_type("assets/app.3f2a.js"),
            ("application/javascript; charset=utf-8", true)
        );
        assert_eq!(content_type("logo.png"), ("image/png", true));
        assert_eq!(content_type("data.bin"), ("application/octet-stream", false));
    }

    #[test]
    fn test_path_traversal_is_rejected() {
        assert!(load("../Cargo.toml").is_none());
        assert!(load("assets/../../Cargo.toml").is_none());
    }
}
