use lambda_http::{Request as LambdaRequest, Response as LambdaResponse};
use serde::Serialize;
use tracing::{error, info};

use crate::common::config::Config;
use crate::common::errors::Error;
use crate::common::store::ItemStore;
use crate::common::utils::{json_response, to_html_safe_json};

const ADDED_MESSAGE: &str = "Added";
const COMPLETED_MESSAGE: &str = "Completed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    List,
    Add,
    Complete,
}

const VERBS: [(&str, Verb); 3] = [
    ("list", Verb::List),
    ("add", Verb::Add),
    ("complete", Verb::Complete),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List,
    Add(String),
    Complete(String),
    /// Unknown or missing verb: the path is returned as-is.
    Echo(String),
}

impl Action {
    pub fn parse(path: &str) -> Self {
        let path = urlencoding::decode(path)
            .map(|decoded| decoded.into_owned())
            .unwrap_or_else(|_| path.to_string());

        let segments: Vec<&str> = path.split('/').collect();
        let verb = segments
            .get(1)
            .and_then(|segment| VERBS.iter().find(|(name, _)| name == segment))
            .map(|(_, verb)| *verb);
        let name = segments.get(2..).map(|rest| rest.join("/")).unwrap_or_default();

        match verb {
            Some(Verb::List) => Action::List,
            Some(Verb::Add) => Action::Add(name),
            Some(Verb::Complete) => Action::Complete(name),
            None => Action::Echo(path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub message: String,
}

impl Reply {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            status: 200,
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Envelope<'a> {
    message: &'a str,
}

pub async fn route(action: Action, store: &dyn ItemStore) -> Reply {
    let result = match action {
        Action::List => store.list().await.map(|names| names.join("\n")),
        Action::Add(name) => store.upsert(&name).await.map(|_| ADDED_MESSAGE.into()),
        Action::Complete(name) => store.delete(&name).await.map(|_| COMPLETED_MESSAGE.into()),
        Action::Echo(path) => Ok(path),
    };

    match result {
        Ok(message) => Reply::ok(message),
        Err(err) => {
            error!("Store call failed: {}", err);
            Reply {
                status: err.status(),
                message: err.to_string(),
            }
        }
    }
}

pub fn render(reply: &Reply, config: &Config) -> Result<LambdaResponse<String>, Error> {
    let envelope = Envelope {
        message: &reply.message,
    };
    respond(reply.status, &envelope, config)
}

/// An unencodable body becomes an empty 500 reply.
fn respond<T: Serialize>(
    status: u16,
    body: &T,
    config: &Config,
) -> Result<LambdaResponse<String>, Error> {
    let (status, body) = match to_html_safe_json(body) {
        Ok(body) => (status, body),
        Err(err) => {
            error!("Failed to encode response envelope: {}", err);
            (500, String::new())
        }
    };

    let response = json_response(status, body, config)?;
    if status >= 400 {
        return Err(Error::HttpError(response));
    }

    Ok(response)
}

#[tracing::instrument(skip(store, config))]
pub async fn process_request(
    request: LambdaRequest,
    store: &dyn ItemStore,
    config: &Config,
) -> Result<LambdaResponse<String>, Error> {
    let path = request.uri().path();
    info!("{} {}", request.method(), path);

    let action = Action::parse(path);
    info!("Dispatching {:?}", action);

    let reply = route(action, store).await;
    render(&reply, config)
}
