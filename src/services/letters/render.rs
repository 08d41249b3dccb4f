use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;
use futures_util::StreamExt;

use crate::config::AppConfig;
use crate::errors::{CoopError, Result};

// A4，单位英寸
const A4_WIDTH_IN: f64 = 8.27;
const A4_HEIGHT_IN: f64 = 11.69;

/// 每次请求启动一个无头浏览器，把 HTML 打印成 PDF
///
/// 渲染受 `letters.render_timeout` 限制，无论成功与否浏览器都会被关闭。
pub async fn render_pdf(html: &str) -> Result<Vec<u8>> {
    let letters = &AppConfig::get().letters;

    let mut builder = BrowserConfig::builder()
        .no_sandbox()
        .arg("--disable-setuid-sandbox")
        .arg("--disable-gpu");
    if !letters.chrome_executable.is_empty() {
        builder = builder.chrome_executable(&letters.chrome_executable);
    }
    let config = builder.build().map_err(CoopError::letter_render)?;

    let (mut browser, mut handler) = Browser::launch(config).await?;
    let handler_task = tokio::spawn(async move {
        while let Some(event) = handler.next().await {
            if event.is_err() {
                break;
            }
        }
    });

    let render = async {
        let page = browser.new_page("about:blank").await?;
        page.set_content(html).await?;
        let pdf = page
            .pdf(PrintToPdfParams {
                print_background: Some(true),
                paper_width: Some(A4_WIDTH_IN),
                paper_height: Some(A4_HEIGHT_IN),
                ..Default::default()
            })
            .await?;
        Ok::<_, CoopError>(pdf)
    };
    let outcome =
        tokio::time::timeout(Duration::from_secs(letters.render_timeout.max(1)), render).await;

    if let Err(e) = browser.close().await {
        tracing::warn!("关闭浏览器失败: {e}");
    }
    let _ = browser.wait().await;
    handler_task.abort();

    match outcome {
        Ok(result) => result,
        Err(_) => Err(CoopError::letter_render(format!(
            "Rendering timed out after {}s",
            letters.render_timeout
        ))),
    }
}
