//! Demo: video ID extraction and output formats
//!
//! Run with: cargo run -p ytt-models --example youtube_url_demo

use ytt_models::{extract_video_id, select_formatter, TranscriptSegment};

fn main() {
    let test_urls = [
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        "https://youtu.be/dQw4w9WgXcQ?t=30",
        "https://www.youtube.com/shorts/abc123def45",
        "https://www.youtube.com/watch?list=PLrAXtmRdnEQy",
        "https://vimeo.com/123456789",
    ];

    for url in test_urls {
        match extract_video_id(url) {
            Ok(id) => println!("{:<50} -> {}", url, id),
            Err(e) => println!("{:<50} -> error: {}", url, e),
        }
    }

    let segments = vec![
        TranscriptSegment::new("Never gonna give you up", 18.0, 3.2),
        TranscriptSegment::new("Never gonna let you down", 21.2, 2.9),
    ];

    for name in ["JSON", "Pretty Print", "Text", "WebVTT", "SRT", "xml"] {
        let (format, ext) = select_formatter(name);
        println!("\n{}", "=".repeat(60));
        println!("FORMAT: {:?} -> {} (.{})", name, format, ext);
        println!("{}", "=".repeat(60));

        match format.format_transcript(&segments) {
            Ok(body) => println!("{}", body),
            Err(e) => println!("error: {}", e),
        }
    }
}
