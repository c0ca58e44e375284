//! Integration tests for the client network layer against a scripted server.
//!
//! Each test binds an ephemeral-port listener and plays the server's half of
//! the protocol by hand with the core codec, so the `ServerConnection` is
//! exercised over a real TCP stream without depending on the server crate.

use passgen_core::{
    decode_request, encode_menu, encode_response, MenuRecord, PasswordPolicy, RequestRecord,
    ResponseRecord, REQUEST_RECORD_SIZE,
};
use passgen_client::infrastructure::network::{ClientNetworkError, ServerConnection};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

#[tokio::test]
async fn test_recv_menu_returns_the_servers_text() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");
        let menu = MenuRecord::describing(&PasswordPolicy::default());
        stream
            .write_all(&encode_menu(&menu).expect("encode"))
            .await
            .expect("menu write");
        // Keep the connection open until the client is done reading.
        let mut sink = [0u8; 1];
        let _ = stream.read(&mut sink).await;
    });

    let mut connection = ServerConnection::connect(addr).await.expect("connect");
    let menu = connection.recv_menu().await.expect("menu");
    assert!(menu.text.contains("between 6 and 32"));
}

#[tokio::test]
async fn test_request_round_trips_through_a_scripted_server() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");

        let mut buf = [0u8; REQUEST_RECORD_SIZE];
        stream.read_exact(&mut buf).await.expect("request read");
        let request = decode_request(&buf).expect("request decode");
        assert_eq!(request.selector, b'n');
        assert_eq!(request.length_text, "8");

        let response = ResponseRecord::granting("24680135".to_string());
        stream
            .write_all(&encode_response(&response).expect("encode"))
            .await
            .expect("response write");
    });

    let mut connection = ServerConnection::connect(addr).await.expect("connect");
    let response = connection
        .request(&RequestRecord::new(b'n', "8"))
        .await
        .expect("request");

    assert!(response.keep_going);
    assert!(!response.request_error);
    assert_eq!(response.password, "24680135");
}

#[tokio::test]
async fn test_server_hanging_up_mid_response_is_a_transport_fault() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");
        let mut buf = [0u8; REQUEST_RECORD_SIZE];
        stream.read_exact(&mut buf).await.expect("request read");
        // Answer with less than one Response record, then hang up.
        stream.write_all(&[0x01, b'p']).await.expect("partial write");
    });

    let mut connection = ServerConnection::connect(addr).await.expect("connect");
    let result = connection.request(&RequestRecord::new(b'a', "10")).await;
    assert!(matches!(result, Err(ClientNetworkError::Io(_))));
}
