use crate::context::QueryContext;
use crate::ports::{AnswerData, AnswerRecord, DnsExchanger};
use linktracer_domain::{DnsQuery, DomainRecord, RecordType};
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolves one record type by walking the nameserver list in order.
///
/// The first server that answers wins, even with an empty answer. Failed
/// servers are skipped silently, and when every server fails the result is an
/// empty list rather than an error, so an outage looks like "no records".
pub struct RecordResolver {
    exchanger: Arc<dyn DnsExchanger>,
}

impl RecordResolver {
    pub fn new(exchanger: Arc<dyn DnsExchanger>) -> Self {
        Self { exchanger }
    }

    pub async fn resolve(
        &self,
        ctx: &QueryContext,
        domain: impl Into<Arc<str>>,
        record_type: RecordType,
        name_servers: &[String],
    ) -> Vec<DomainRecord> {
        let query = DnsQuery::new(domain, record_type);
        let domain = &query.domain;

        for server in name_servers {
            match self.exchanger.exchange(ctx, &query, server).await {
                Ok(answers) => {
                    let records: Vec<DomainRecord> =
                        answers.iter().filter_map(normalize_answer).collect();

                    debug!(
                        domain = %domain,
                        record_type = %record_type,
                        server = %server,
                        answers = answers.len(),
                        records = records.len(),
                        "Nameserver answered"
                    );
                    return records;
                }
                Err(e) => {
                    warn!(
                        domain = %domain,
                        record_type = %record_type,
                        server = %server,
                        error = %e,
                        "Nameserver exchange failed, trying next"
                    );
                }
            }
        }

        debug!(
            domain = %domain,
            record_type = %record_type,
            servers = name_servers.len(),
            "No nameserver answered, returning no records"
        );
        Vec::new()
    }
}

fn normalize_answer(answer: &AnswerRecord) -> Option<DomainRecord> {
    let record = match &answer.data {
        AnswerData::A(addr) => {
            DomainRecord::new(answer.name.clone(), RecordType::A, addr.to_string(), answer.ttl)
        }
        AnswerData::AAAA(addr) => DomainRecord::new(
            answer.name.clone(),
            RecordType::AAAA,
            addr.to_string(),
            answer.ttl,
        ),
        AnswerData::MX {
            preference,
            exchange,
        } => DomainRecord::mail_exchange(answer.name.clone(), exchange.clone(), *preference, answer.ttl),
        AnswerData::TXT(strings) => DomainRecord::new(
            answer.name.clone(),
            RecordType::TXT,
            strings.join(" "),
            answer.ttl,
        ),
        AnswerData::Other(rtype) => {
            debug!(name = %answer.name, rtype, "Skipping answer outside analysed types");
            return None;
        }
    };
    Some(record)
}
