use crate::dns::conversion::{RecordBuilder, RecordTypeMapper};
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::{Name, Record};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use zonedns_application::use_cases::{HandleDnsQueryUseCase, QueryOutcome};
use zonedns_domain::dns_name::fqdn;
use zonedns_domain::{DnsQuery, DnsRequest};

/// Lower-case, fully-qualified ASCII form of a question name. IDN labels
/// stay in punycode so they compare equal to configured owner names.
fn query_name(name: &Name) -> String {
    fqdn(&name.to_ascii().to_ascii_lowercase())
}

/// hickory request handler in front of [`HandleDnsQueryUseCase`].
///
/// Answers are authoritative. A question outside every served zone is
/// refused; a question inside a zone with no records gets an empty
/// NOERROR answer.
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    fn to_request(request: &Request) -> Option<DnsRequest> {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to parse request info");
                return None;
            }
        };

        let query = &request_info.query;
        let name = query_name(query.name());
        let record_type = RecordTypeMapper::from_hickory(query.query_type());
        let class = RecordTypeMapper::class_from_hickory(query.query_class());

        Some(DnsRequest::single(
            DnsQuery::new(name, record_type).with_class(class),
            request.src().ip(),
        ))
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let Some(dns_request) = Self::to_request(request) else {
            return send_response(request, &mut response_handle, ResponseCode::FormErr, &[]).await;
        };

        let domain = dns_request.primary_name().unwrap_or_default().to_owned();
        info!(
            domain = %domain,
            record_type = %dns_request.queries[0].record_type,
            client = %dns_request.client_ip,
            "DNS query received"
        );

        let answer = match self.use_case.execute(&dns_request) {
            QueryOutcome::Answer(answer) => answer,
            QueryOutcome::NotAuthoritative => {
                warn!(domain = %domain, "No zone serves this name");
                return send_response(request, &mut response_handle, ResponseCode::Refused, &[])
                    .await;
            }
        };

        let answers = match answer
            .records
            .iter()
            .map(RecordBuilder::to_hickory)
            .collect::<Result<Vec<Record>, _>>()
        {
            Ok(answers) => answers,
            Err(e) => {
                error!(error = %e, domain = %domain, "Failed to encode answer");
                return send_response(request, &mut response_handle, ResponseCode::ServFail, &[])
                    .await;
            }
        };

        if answers.is_empty() {
            debug!(domain = %domain, "No records found (NODATA)");
        } else {
            debug!(domain = %domain, answers = answers.len(), "Sending response");
        }

        send_response(request, &mut response_handle, ResponseCode::NoError, &answers).await
    }
}

async fn send_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
    answers: &[Record],
) -> ResponseInfo {
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = *request.header();
    header.set_response_code(code);
    header.set_authoritative(code == ResponseCode::NoError);
    header.set_recursion_available(false);
    let response = builder.build(header, answers.iter(), &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, code = ?code, "Failed to send response");
            ResponseInfo::from(*request.header())
        }
    }
}
