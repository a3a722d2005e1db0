use super::*;

fn site() -> SocketAddr {
    "127.0.0.1:8080".parse().expect("addr")
}

#[test]
fn listen_addr_defaults_to_site_addr() {
    assert_eq!(listen_addr(site(), None).expect("addr"), site());
    assert_eq!(listen_addr(site(), Some("  ")).expect("addr"), site());
}

#[test]
fn listen_addr_port_override_binds_all_interfaces() {
    let addr = listen_addr(site(), Some("3000")).expect("addr");
    assert_eq!(addr, "0.0.0.0:3000".parse::<SocketAddr>().expect("addr"));
}

#[test]
fn listen_addr_rejects_bad_port() {
    let err = listen_addr(site(), Some("http")).unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT `http`");
}
