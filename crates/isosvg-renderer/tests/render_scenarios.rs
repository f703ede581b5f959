//! End-to-end renders of whole SVG documents.

use std::io::{self, Write};

use isosvg_core::surface::{egg_box, ripple};
use isosvg_core::{RenderConfig, RenderDefaults, RenderParams};
use isosvg_renderer::{render, render_with, RenderError};

fn render_to_string(config: &RenderConfig) -> String {
    let mut out = Vec::new();
    render(config, &mut out).expect("render into Vec cannot fail");
    String::from_utf8(out).expect("SVG output is UTF-8")
}

fn polygon_count(svg: &str) -> usize {
    svg.matches("<polygon ").count()
}

/// A sink that accepts `budget` bytes and then fails every write.
struct FailingSink {
    budget: usize,
    written: usize,
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written + buf.len() > self.budget {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        self.written += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_default_document() {
    let svg = render_to_string(&RenderConfig::default());

    let header = svg.lines().next().unwrap();
    assert!(header.starts_with("<svg "));
    assert!(header.contains("width=\"600\" height=\"320\""));
    assert!(header.contains("fill: blue"));
    assert!(svg.ends_with("</svg>\n"));

    let count = polygon_count(&svg);
    assert!(count < 10_000 && count > 9_900, "unexpected polygon count {}", count);
    assert_eq!(count, 9_996);
}

#[test]
fn test_render_is_deterministic() {
    let cfg = RenderConfig::new(800, 450, "#336699").unwrap();
    assert_eq!(render_to_string(&cfg), render_to_string(&cfg));
}

#[test]
fn test_finite_surface_emits_every_cell() {
    let cfg = RenderConfig::default();
    let mut out = Vec::new();
    let stats = render_with(&cfg, |_, _| 0.0, &mut out).unwrap();
    assert_eq!(stats.emitted, 10_000);
    assert_eq!(stats.skipped, 0);
    assert_eq!(polygon_count(&String::from_utf8(out).unwrap()), 10_000);

    let stats = render_with(&cfg, egg_box, io::sink()).unwrap();
    assert_eq!(stats.emitted, 10_000);
}

#[test]
fn test_invalid_surface_emits_empty_document() {
    let cfg = RenderConfig::default();
    let mut out = Vec::new();
    let stats = render_with(&cfg, |_, _| f64::NAN, &mut out).unwrap();
    assert_eq!(stats.emitted, 0);
    assert_eq!(stats.skipped, 10_000);

    let svg = String::from_utf8(out).unwrap();
    assert_eq!(polygon_count(&svg), 0);
    assert!(svg.starts_with("<svg "));
    assert!(svg.ends_with("</svg>\n"));
}

#[test]
fn test_polygons_have_four_finite_vertices() {
    let svg = render_to_string(&RenderConfig::default());
    for line in svg.lines().filter(|l| l.starts_with("<polygon")) {
        let points = line
            .trim_start_matches("<polygon points=\"")
            .trim_end_matches("\"/>");
        let pairs: Vec<&str> = points.split(' ').collect();
        assert_eq!(pairs.len(), 4, "bad polygon: {}", line);
        for pair in pairs {
            let (x, y) = pair.split_once(',').unwrap();
            assert!(x.parse::<f64>().unwrap().is_finite());
            assert!(y.parse::<f64>().unwrap().is_finite());
        }
    }
}

#[test]
fn test_request_params_flow_into_document() {
    let params = RenderParams::from_pairs([("width", "1024"), ("height", "junk"), ("color", "red")]);
    let cfg = RenderConfig::resolve(&params, &RenderDefaults::default());
    let svg = render_to_string(&cfg);
    assert!(svg.contains("width=\"1024\" height=\"320\""));
    assert!(svg.contains("fill: red"));
}

#[test]
fn test_sink_failure_aborts_render() {
    let cfg = RenderConfig::default();

    let result = render(&cfg, FailingSink { budget: 0, written: 0 });
    assert!(matches!(result, Err(RenderError::Io(_))));

    // Fail partway through the polygon stream.
    let mut sink = FailingSink {
        budget: 4096,
        written: 0,
    };
    let result = render_with(&cfg, ripple, &mut sink);
    match result {
        Err(RenderError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("expected I/O error, got {:?}", other),
    }
    assert!(sink.written <= 4096);
}
