#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::sync::oneshot;

pub const MOCK_IPV4: [u8; 4] = [93, 184, 216, 34];
pub const MOCK_TTL: u32 = 60;
pub const MOCK_MX_PREFERENCE: u16 = 10;
pub const MOCK_TXT: [&str; 2] = ["v=spf1", "-all"];

const TYPE_A: u16 = 1;
const TYPE_MX: u16 = 15;
const TYPE_TXT: u16 = 16;

/// How the mock server treats incoming queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockBehavior {
    /// Answer UDP with TC set and no records; full answers only over TCP
    pub truncate_udp: bool,
    /// Flip the transaction ID on every reply
    pub wrong_id: bool,
    /// Read queries but never reply
    pub silent: bool,
}

/// In-process DNS server listening on the same loopback port for UDP and TCP.
///
/// Answers A, MX and TXT questions with fixed records and AAAA with an
/// empty NOERROR.
pub struct MockDnsServer {
    addr: SocketAddr,
    udp_queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start() -> Result<Self, std::io::Error> {
        Self::start_with(MockBehavior::default()).await
    }

    pub async fn start_with(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;

        let udp_queries = Arc::new(AtomicUsize::new(0));
        let tcp_queries = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let udp_counter = Arc::clone(&udp_queries);
        let tcp_counter = Arc::clone(&tcp_queries);
        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            udp_counter.fetch_add(1, Ordering::SeqCst);
                            if behavior.silent {
                                continue;
                            }
                            let response = build_response(
                                &buf[..len],
                                behavior.truncate_udp,
                                behavior.wrong_id,
                            );
                            let _ = socket.send_to(&response, peer).await;
                        }
                    }
                    result = listener.accept() => {
                        if let Ok((stream, _)) = result {
                            tcp_counter.fetch_add(1, Ordering::SeqCst);
                            tokio::spawn(serve_tcp(stream, behavior));
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            udp_queries,
            tcp_queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Address formatted the way name servers are configured.
    pub fn server(&self) -> String {
        self.addr.to_string()
    }

    pub fn udp_queries(&self) -> usize {
        self.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn serve_tcp(mut stream: TcpStream, behavior: MockBehavior) {
    let mut len_buf = [0u8; 2];
    if stream.read_exact(&mut len_buf).await.is_err() {
        return;
    }
    let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
    if stream.read_exact(&mut query).await.is_err() {
        return;
    }
    if behavior.silent {
        return;
    }

    let response = build_response(&query, false, behavior.wrong_id);
    let mut framed = Vec::with_capacity(response.len() + 2);
    framed.extend_from_slice(&(response.len() as u16).to_be_bytes());
    framed.extend_from_slice(&response);
    let _ = stream.write_all(&framed).await;
}

/// Returns the end offset of the question section and its QTYPE.
fn question_bounds(query: &[u8]) -> Option<(usize, u16)> {
    let mut pos = 12;
    loop {
        let len = *query.get(pos)? as usize;
        pos += 1;
        if len == 0 {
            break;
        }
        pos += len;
    }
    let qtype = u16::from_be_bytes([*query.get(pos)?, *query.get(pos + 1)?]);
    let end = pos + 4;
    if end > query.len() {
        return None;
    }
    Some((end, qtype))
}

/// Build a reply to `query`, copying its ID and question section.
pub fn build_response(query: &[u8], truncated: bool, wrong_id: bool) -> Vec<u8> {
    let Some((question_end, qtype)) = question_bounds(query) else {
        return vec![];
    };

    let answers: Vec<Vec<u8>> = if truncated {
        vec![]
    } else {
        match qtype {
            TYPE_A => vec![answer(TYPE_A, &MOCK_IPV4)],
            TYPE_MX => {
                let mut rdata = MOCK_MX_PREFERENCE.to_be_bytes().to_vec();
                // "mail" + pointer to the question name
                rdata.extend_from_slice(&[4, b'm', b'a', b'i', b'l', 0xc0, 0x0c]);
                vec![answer(TYPE_MX, &rdata)]
            }
            TYPE_TXT => {
                let mut rdata = Vec::new();
                for s in MOCK_TXT {
                    rdata.push(s.len() as u8);
                    rdata.extend_from_slice(s.as_bytes());
                }
                vec![answer(TYPE_TXT, &rdata)]
            }
            _ => vec![],
        }
    };

    let mut response = Vec::with_capacity(512);

    let id = u16::from_be_bytes([query[0], query[1]]);
    let id = if wrong_id { id.wrapping_add(1) } else { id };
    response.extend_from_slice(&id.to_be_bytes());

    // QR=1, RD=1, TC as requested; RA=1, RCODE=0
    response.push(if truncated { 0x83 } else { 0x81 });
    response.push(0x80);

    response.extend_from_slice(&[0x00, 0x01]);
    response.extend_from_slice(&(answers.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00]);
    response.extend_from_slice(&[0x00, 0x00]);

    response.extend_from_slice(&query[12..question_end]);
    for a in answers {
        response.extend_from_slice(&a);
    }

    response
}

fn answer(rtype: u16, rdata: &[u8]) -> Vec<u8> {
    let mut rr = vec![0xc0, 0x0c];
    rr.extend_from_slice(&rtype.to_be_bytes());
    rr.extend_from_slice(&[0x00, 0x01]);
    rr.extend_from_slice(&MOCK_TTL.to_be_bytes());
    rr.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    rr.extend_from_slice(rdata);
    rr
}
