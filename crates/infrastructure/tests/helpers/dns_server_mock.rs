#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// What the mock server answers
#[derive(Clone)]
pub struct MockZone {
    pub response_code: ResponseCode,
    /// Answer section for ANY queries
    pub any_answers: Vec<Record>,
    pub ipv4: Vec<Ipv4Addr>,
    pub ipv6: Vec<Ipv6Addr>,
    /// Reply over UDP with TC set and no answers; TCP gets the full answer
    pub truncate_udp: bool,
    /// Reply with an ID that does not match the query
    pub wrong_id: bool,
    /// Send a junk datagram from another port ahead of every UDP reply
    pub stray_datagram: bool,
}

impl MockZone {
    pub fn new() -> Self {
        Self {
            response_code: ResponseCode::NoError,
            any_answers: Vec::new(),
            ipv4: Vec::new(),
            ipv6: Vec::new(),
            truncate_udp: false,
            wrong_id: false,
            stray_datagram: false,
        }
    }

    pub fn with_response_code(mut self, response_code: ResponseCode) -> Self {
        self.response_code = response_code;
        self
    }

    pub fn with_any_answer(mut self, record: Record) -> Self {
        self.any_answers.push(record);
        self
    }

    pub fn with_ipv4(mut self, addr: &str) -> Self {
        self.ipv4.push(addr.parse().unwrap());
        self
    }

    pub fn with_ipv6(mut self, addr: &str) -> Self {
        self.ipv6.push(addr.parse().unwrap());
        self
    }

    pub fn truncated_over_udp(mut self) -> Self {
        self.truncate_udp = true;
        self
    }

    pub fn with_wrong_id(mut self) -> Self {
        self.wrong_id = true;
        self
    }

    pub fn with_stray_datagram(mut self) -> Self {
        self.stray_datagram = true;
        self
    }
}

impl Default for MockZone {
    fn default() -> Self {
        Self::new()
    }
}

/// Mock DNS server for tests
///
/// Listens on UDP and TCP on the same loopback port and answers every query
/// from a [`MockZone`].
pub struct MockDnsServer {
    addr: SocketAddr,
    udp_queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Start a server on an OS-assigned port of 127.0.0.1
    pub async fn start(zone: MockZone) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;

        let udp_queries = Arc::new(AtomicUsize::new(0));
        let tcp_queries = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let udp_counter = udp_queries.clone();
        let tcp_counter = tcp_queries.clone();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            udp_counter.fetch_add(1, Ordering::SeqCst);
                            if zone.stray_datagram {
                                if let Ok(stray) = UdpSocket::bind("127.0.0.1:0").await {
                                    let _ = stray.send_to(&[0xde, 0xad, 0xbe, 0xef], peer).await;
                                }
                            }
                            if let Some(response) = Self::build_response(&zone, &buf[..len], true) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                    result = listener.accept() => {
                        if let Ok((mut stream, _)) = result {
                            tcp_counter.fetch_add(1, Ordering::SeqCst);
                            let zone = zone.clone();
                            tokio::spawn(async move {
                                let Ok(len) = stream.read_u16().await else { return };
                                let mut query = vec![0u8; len as usize];
                                if stream.read_exact(&mut query).await.is_err() {
                                    return;
                                }
                                if let Some(response) = Self::build_response(&zone, &query, false) {
                                    let _ = stream.write_u16(response.len() as u16).await;
                                    let _ = stream.write_all(&response).await;
                                }
                            });
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

    /// Server address
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn udp_queries(&self) -> usize {
        self.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }

    fn build_response(zone: &MockZone, query_bytes: &[u8], over_udp: bool) -> Option<Vec<u8>> {
        let query = Message::from_vec(query_bytes).ok()?;
        let question = query.queries().first()?.clone();

        let id = if zone.wrong_id {
            query.id().wrapping_add(1)
        } else {
            query.id()
        };

        let mut response = Message::new(id, MessageType::Response, OpCode::Query);
        response.set_recursion_desired(query.recursion_desired());
        response.set_recursion_available(true);
        response.set_response_code(zone.response_code);
        response.add_query(question.clone());

        if over_udp && zone.truncate_udp {
            response.set_truncated(true);
            return response.to_vec().ok();
        }

        let owner = question.name().clone();
        let answers: Vec<Record> = match question.query_type() {
            RecordType::ANY => zone.any_answers.clone(),
            RecordType::A => zone
                .ipv4
                .iter()
                .map(|ip| Record::from_rdata(owner.clone(), 60, RData::A(A(*ip))))
                .collect(),
            RecordType::AAAA => zone
                .ipv6
                .iter()
                .map(|ip| Record::from_rdata(owner.clone(), 60, RData::AAAA(AAAA(*ip))))
                .collect(),
            _ => Vec::new(),
        };
        response.add_answers(answers);

        response.to_vec().ok()
    }

    /// Stop the server
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

pub fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}
