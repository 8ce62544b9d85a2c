mod input;
mod request;
mod response;

pub(crate) use request::{build_responses_request, ResponsesRequestParams};
pub(crate) use response::OpenAIResponsesChatResponse;
