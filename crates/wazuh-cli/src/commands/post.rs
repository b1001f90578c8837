//! Post command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use wazuh_client::{Body, Client, FilePart, Method, Params, RequestOptions};

use crate::cli::parse_key_val;
use crate::output;

#[derive(Args, Debug)]
pub struct PostArgs {
    /// API path, e.g. groups
    pub path: String,

    /// Query parameter (repeatable)
    #[arg(long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Form field (repeatable)
    #[arg(long = "data", value_parser = parse_key_val, conflicts_with = "json")]
    pub data: Vec<(String, String)>,

    /// JSON request body
    #[arg(long)]
    pub json: Option<String>,

    /// File to upload as field=path (repeatable)
    #[arg(long = "file", value_parser = parse_key_val, conflicts_with = "json")]
    pub files: Vec<(String, String)>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(client: &Client, args: PostArgs) -> Result<()> {
    let params: Params = args.params.into_iter().collect();

    let body = match (&args.json, args.data.is_empty()) {
        (Some(json), _) => Some(Body::Json(
            serde_json::from_str(json).context("Invalid JSON body")?,
        )),
        (None, false) => Some(Body::Form(args.data.into_iter().collect())),
        (None, true) => None,
    };

    let mut files = Vec::with_capacity(args.files.len());
    for (field, path) in args.files {
        files.push(read_file(field, PathBuf::from(path)).await?);
    }

    let endpoint = client.endpoint(&args.path);
    let response = client
        .request(
            Method::POST,
            &endpoint,
            Some(&params),
            body,
            files,
            &RequestOptions::default(),
        )
        .await
        .with_context(|| format!("Failed to POST {}", args.path))?;

    output::response(response, args.pretty).await
}

async fn read_file(field: String, path: PathBuf) -> Result<FilePart> {
    let bytes = tokio::fs::read(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .context("File path has no file name")?;

    Ok(FilePart::new(field, file_name, bytes))
}
