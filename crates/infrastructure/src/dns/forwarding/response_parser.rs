use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use linktracer_application::ports::{AnswerData, AnswerRecord};
use linktracer_domain::ExchangeError;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub truncated: bool,

    /// Answer section, in the order the server sent it
    pub answers: Vec<AnswerRecord>,
}

pub struct ResponseParser;

impl ResponseParser {
    /// Parse a wire-format response received from `server`.
    ///
    /// Any well-formed response counts as an answer, whatever its rcode.
    pub fn parse(response_bytes: &[u8], server: &str) -> Result<DnsResponse, ExchangeError> {
        let message =
            Message::from_vec(response_bytes).map_err(|e| ExchangeError::MalformedResponse {
                server: server.to_string(),
                reason: e.to_string(),
            })?;

        let rcode = message.response_code();
        let truncated = message.truncated();

        let answers: Vec<AnswerRecord> = message
            .answers()
            .iter()
            .map(|record| {
                let data = match record.data() {
                    RData::A(a) => AnswerData::A(a.0),
                    RData::AAAA(aaaa) => AnswerData::AAAA(aaaa.0),
                    RData::MX(mx) => AnswerData::MX {
                        preference: mx.preference(),
                        exchange: mx.exchange().to_string(),
                    },
                    RData::TXT(txt) => AnswerData::TXT(
                        txt.txt_data()
                            .iter()
                            .map(|d| String::from_utf8_lossy(d).to_string())
                            .collect(),
                    ),
                    _ => AnswerData::Other(u16::from(record.record_type())),
                };
                AnswerRecord::new(record.name().to_string(), record.ttl(), data)
            })
            .collect();

        debug!(
            server = %server,
            rcode = Self::rcode_to_status(rcode),
            answers = answers.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            truncated,
            answers,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
