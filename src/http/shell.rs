//! Application shell document.
//!
//! With hash history the server hands out one HTML document; every
//! application path lives in the fragment.

use std::fs;
use std::io;

use crate::config::ServerConfig;
use crate::routing::{Params, Router};

/// Load the configured index file, or render the built-in shell.
pub fn load_shell(config: &ServerConfig, router: &Router, base: &str) -> io::Result<String> {
    match &config.index_file {
        Some(path) => {
            let html = fs::read_to_string(path)?;
            tracing::info!(path = %path, bytes = html.len(), "Loaded application shell");
            Ok(html)
        }
        None => Ok(builtin_shell(router, base)),
    }
}

/// Minimal page linking every route that needs no parameters.
pub fn builtin_shell(router: &Router, base: &str) -> String {
    let mut links = String::new();
    for route in router.routes() {
        let item = match router.build_path(route.name(), &Params::new()) {
            Ok(path) => format!(
                "      <li><a href=\"{base}#{path}\">{}</a> ({})</li>\n",
                route.name(),
                route.view()
            ),
            Err(_) => format!(
                "      <li>{} <code>{base}#{}</code> ({})</li>\n",
                route.name(),
                route.pattern(),
                route.view()
            ),
        };
        links.push_str(&item);
    }

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><meta charset=\"utf-8\"><title>hash-router</title></head>\n\
         <body>\n\
         <div id=\"app\"></div>\n\
         <nav>\n    <ul>\n{links}    </ul>\n</nav>\n\
         </body>\n\
         </html>\n"
    )
}
