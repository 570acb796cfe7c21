//! linksnip RPC Server — JSON-RPC over stdin/stdout for browser front ends.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"item.add", "params":{"title":"...","target":"..."}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! Logs go to stderr; stdout carries protocol lines only. Settings live for
//! the lifetime of the process and are changed with `settings.set`.

use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use log::{debug, info, warn};
use serde_json::{json, Value};

use linksnip::app::App;
use linksnip::rpc_handler::handle_method;

fn respond(out: &mut impl Write, response: &Value) -> io::Result<()> {
    writeln!(out, "{}", response)?;
    out.flush()
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = Mutex::new(App::new());
    info!("linksnip-rpc session started");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    respond(
        &mut out,
        &json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")}),
    )?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                warn!("unparseable request: {}", e);
                respond(&mut out, &json!({"id": null, "error": format!("parse error: {}", e)}))?;
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);
        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));
        debug!("request {} {}", id, method);

        let response = match handle_method(&app, method, &params) {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => {
                debug!("request {} failed: {}", id, err);
                json!({"id": id, "error": err})
            }
        };
        respond(&mut out, &response)?;
    }

    info!("stdin closed, shutting down");
    Ok(())
}
