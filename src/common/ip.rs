//! IPアドレスユーティリティ
//!
//! クライアントIPの決定とローカルネットワークアドレスの検出

use axum::http::HeaderMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr, UdpSocket};

/// IPアドレスを正規化する
///
/// IPv4-mapped IPv6（::ffff:x.x.x.x）をIPv4に変換。
/// それ以外はそのまま返す。
pub fn normalize_ip(addr: IpAddr) -> IpAddr {
    match addr {
        IpAddr::V6(v6) => {
            if let Some(v4) = v6.to_ipv4_mapped() {
                IpAddr::V4(v4)
            } else {
                IpAddr::V6(v6)
            }
        }
        v4 => v4,
    }
}

/// SocketAddrからIPアドレスを抽出し正規化する
pub fn normalize_socket_ip(addr: &SocketAddr) -> IpAddr {
    normalize_ip(addr.ip())
}

/// アクセスログに記録するクライアントIPを決定する
///
/// `X-Forwarded-For` の先頭エントリを優先し、なければ接続元アドレスを使う。
/// どちらも得られない場合は "unknown"。
pub fn client_ip(headers: &HeaderMap, remote: Option<SocketAddr>) -> String {
    if let Some(forwarded) = headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
    {
        if let Some(first) = forwarded.split(',').next() {
            if let Ok(ip) = first.trim().parse::<IpAddr>() {
                return normalize_ip(ip).to_string();
            }
        }
    }
    match remote {
        Some(addr) => normalize_socket_ip(&addr).to_string(),
        None => "unknown".to_string(),
    }
}

/// ローカルネットワークアドレスを検出する
///
/// 外部アドレスへUDPソケットを接続し、OSが割り当てたローカルアドレスを読む。
/// パケットは送信しない。失敗時はループバックを返す。
pub fn detect_local_ip() -> IpAddr {
    detect_local_ip_via("8.8.8.8:80").unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}

fn detect_local_ip_via(probe_addr: &str) -> std::io::Result<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0")?;
    socket.connect(probe_addr)?;
    Ok(socket.local_addr()?.ip())
}
