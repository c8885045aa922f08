use sipcodec::{
    Body, Error, ErrorKind, Headers, Kind, Message, Metadata, create_request, create_response,
    marshal, unmarshal,
};

const INVITE_WITH_SDP: &[u8] = b"INVITE sip:user@example.com SIP/2.0\r\n\
    Via: SIP/2.0/UDP client.atlanta.example.com:5060;branch=z9hG4bKnashds7\r\n\
    Max-Forwards: 70\r\n\
    From: Alice <sip:alice@atlanta.example.com>;tag=9fxced76sl\r\n\
    To: Bob <sip:bob@example.com>\r\n\
    Call-ID: 3848276298220188511@atlanta.example.com\r\n\
    CSeq: 1 INVITE\r\n\
    Contact: <sip:alice@client.atlanta.example.com>\r\n\
    Content-Type: application/sdp\r\n\
    Content-Length: 142\r\n\
    \r\n\
    v=0\r\n\
    o=alice 2890844526 2890842807 IN IP4 client.atlanta.example.com\r\n\
    s=-\r\n\
    c=IN IP4 192.0.2.101\r\n\
    t=0 0\r\n\
    m=audio 49170 RTP/AVP 0\r\n\
    a=rtpmap:0 PCMU/8000\r\n";

const INVITE_SDP_BASE64: &str = "dj0wDQpvPWFsaWNlIDI4OTA4NDQ1MjYgMjg5MDg0MjgwNyBJTiBJUDQgY2xpZW50LmF0bGFudGEuZXhhbXBsZS5jb20NCnM9LQ0KYz1JTiBJUDQgMTkyLjAuMi4xMDENCnQ9MCAwDQptPWF1ZGlvIDQ5MTcwIFJUUC9BVlAgMA0KYT1ydHBtYXA6MCBQQ01VLzgwMDANCg==";

const OK_RESPONSE: &[u8] = b"SIP/2.0 200 OK\r\n\
    Via: SIP/2.0/UDP 10.0.0.1:5060;branch=z9hG4bKkjshdyff\r\n\
    To: sip:bob@example.com;tag=abc123\r\n\
    From: sip:alice@example.com;tag=123abc\r\n\
    CSeq: 1 INVITE\r\n\
    Call-ID: abcdefg1234567890\r\n\
    Content-Length: 0\r\n\r\n";

fn values(message: &Message, name: &str) -> Vec<String> {
    message.headers().get(name).unwrap_or_default().to_vec()
}

#[test]
fn invite_with_sdp_body() {
    let msg = unmarshal(INVITE_WITH_SDP).unwrap();

    assert_eq!(msg.kind(), Kind::Request);
    assert_eq!(
        msg.metadata(),
        &Metadata::from([
            ("method", "INVITE"),
            ("uri", "sip:user@example.com"),
            ("version", "SIP/2.0"),
        ])
    );
    assert_eq!(msg.headers().len(), 9);
    assert_eq!(
        values(&msg, "From"),
        ["Alice <sip:alice@atlanta.example.com>;tag=9fxced76sl"]
    );
    assert_eq!(msg.body_base64(), INVITE_SDP_BASE64);
    assert!(msg.body().as_bytes().ends_with(b"a=rtpmap:0 PCMU/8000\r\n"));
}

#[test]
fn ok_response_without_body() {
    let msg = unmarshal(OK_RESPONSE).unwrap();

    assert_eq!(msg.kind(), Kind::Response);
    assert_eq!(msg.status_code(), Some(200));
    assert_eq!(msg.metadata().get("reason"), Some("OK"));
    assert_eq!(msg.body(), &Body::Empty);
}

#[test]
fn reason_phrase_with_spaces() {
    let msg = unmarshal(b"SIP/2.0 481 Call/Transaction Does Not Exist\r\nCSeq: 2 BYE\r\n\r\n").unwrap();
    assert_eq!(
        msg.metadata().get("reason"),
        Some("Call/Transaction Does Not Exist")
    );
}

#[test]
fn repeated_via_lines_accumulate() {
    let wire = b"INVITE sip:100@10.0.0.1 SIP/2.0\r\n\
        Via: SIP/2.0/TCP pc33.atlanta.com;branch=z9hG4bKnashds8\r\n\
        Max-Forwards: 70\r\n\
        Via: SIP/2.0/TCP pc33.atlanta.com;branch=z9hG4bKnashds8\r\n\
        Via: SIP/2.0/UDP 192.168.1.1;branch=z9hG4bK776asdhds\r\n\
        Content-Length: 0\r\n\r\n";

    let msg = unmarshal(wire).unwrap();

    assert_eq!(
        values(&msg, "Via"),
        [
            "SIP/2.0/TCP pc33.atlanta.com;branch=z9hG4bKnashds8",
            "SIP/2.0/TCP pc33.atlanta.com;branch=z9hG4bKnashds8",
            "SIP/2.0/UDP 192.168.1.1;branch=z9hG4bK776asdhds",
        ]
    );
}

#[test]
fn folded_via_with_trailing_comma() {
    let wire = b"INVITE sip:sips@example.com SIP/2.0\r\n\
        Via: SIP/2.0/UDP 192.168.0.1:5060;branch=z9hG4bK1\r\n\
        Via: SIP/2.0/TCP 192.168.0.2:5060;branch=z9hG4bK2,\r\n \
        SIP/2.0/UDP 192.168.0.3:5060;branch=z9hG4bK3\r\n\
        From: <sip:caller@example.com>;tag=12345\r\n\
        \r\n";

    let msg = unmarshal(wire).unwrap();

    assert_eq!(
        values(&msg, "Via"),
        [
            "SIP/2.0/UDP 192.168.0.1:5060;branch=z9hG4bK1",
            "SIP/2.0/TCP 192.168.0.2:5060;branch=z9hG4bK2",
            "SIP/2.0/UDP 192.168.0.3:5060;branch=z9hG4bK3",
        ]
    );
    assert_eq!(values(&msg, "From"), ["<sip:caller@example.com>;tag=12345"]);
}

#[test]
fn comma_separated_route() {
    let wire = b"INVITE sip:bob@biloxi.com SIP/2.0\r\n\
        Route: <sip:proxy.atlanta.com;lr>,<sip:proxy2.atlanta.com;lr>\r\n\
        Content-Length: 0\r\n\r\n";

    let msg = unmarshal(wire).unwrap();

    assert_eq!(
        values(&msg, "Route"),
        ["<sip:proxy.atlanta.com;lr>", "<sip:proxy2.atlanta.com;lr>"]
    );
}

#[test]
fn malformed_messages_are_rejected() {
    let cases: [&[u8]; 6] = [
        // Status line without reason
        b"SIP/2.0 200\r\nCSeq: 1 INVITE\r\n\r\n",
        // Request line with four tokens
        b"SUPER INVITE sip:bob@biloxi.com SIP/2.0\r\nCSeq: 1 INVITE\r\n\r\n",
        // Body without separating blank line
        b"INVITE sip:bob@biloxi.com SIP/2.0\r\nContent-Length: 142\r\nv=0\r\n",
        // Header section never terminated
        b"MESSAGE sip:bob@biloxi.com SIP/2.0\r\nContent-Length: 18\r\nWatson: come here.\r\n",
        // Continuation before any header
        b"INVITE sip:sips@example.com SIP/2.0\r\n SIP/2.0/UDP 192.168.0.3:5060\r\n\r\n",
        // Empty buffer
        b"",
    ];

    for wire in cases {
        let err = unmarshal(wire).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMessage, "{:?}", String::from_utf8_lossy(wire));
    }
}

#[test]
fn reencoding_sorts_headers_descending() {
    let msg = unmarshal(INVITE_WITH_SDP).unwrap();
    let encoded = marshal(&msg).unwrap();

    let expected: &[u8] = b"INVITE sip:user@example.com SIP/2.0\r\n\
        Via: SIP/2.0/UDP client.atlanta.example.com:5060;branch=z9hG4bKnashds7\r\n\
        To: Bob <sip:bob@example.com>\r\n\
        Max-Forwards: 70\r\n\
        From: Alice <sip:alice@atlanta.example.com>;tag=9fxced76sl\r\n\
        Content-Type: application/sdp\r\n\
        Content-Length: 142\r\n\
        Contact: <sip:alice@client.atlanta.example.com>\r\n\
        Call-ID: 3848276298220188511@atlanta.example.com\r\n\
        CSeq: 1 INVITE\r\n\
        \r\n\
        v=0\r\n\
        o=alice 2890844526 2890842807 IN IP4 client.atlanta.example.com\r\n\
        s=-\r\n\
        c=IN IP4 192.0.2.101\r\n\
        t=0 0\r\n\
        m=audio 49170 RTP/AVP 0\r\n\
        a=rtpmap:0 PCMU/8000\r\n";

    assert_eq!(encoded, expected);
    assert_eq!(unmarshal(&encoded).unwrap(), msg);
}

#[test]
fn roundtrip_is_byte_exact_when_already_descending() {
    let wire: &[u8] = b"SIP/2.0 200 OK\r\n\
        Via: SIP/2.0/UDP 10.0.0.1:5060;branch=z9hG4bKkjshdyff\r\n\
        To: sip:bob@example.com;tag=abc123\r\n\
        From: sip:alice@example.com;tag=123abc\r\n\
        Content-Length: 0\r\n\
        Call-ID: abcdefg1234567890\r\n\
        CSeq: 1 INVITE\r\n\r\n";

    let msg = unmarshal(wire).unwrap();
    assert_eq!(marshal(&msg).unwrap(), wire);
}

#[test]
fn factory_request_encodes_and_parses() {
    let metadata = Metadata::from([
        ("method", "INVITE"),
        ("uri", "sip:user@example.com"),
        ("version", "SIP/2.0"),
    ]);
    let headers = Headers::from([
        ("Via", "SIP/2.0/UDP client.atlanta.example.com:5060;branch=z9hG4bKnashds7"),
        ("Max-Forwards", "70"),
        ("From", "Alice <sip:alice@atlanta.example.com>;tag=9fxced76sl"),
        ("To", "Bob <sip:bob@example.com>"),
        ("Call-ID", "3848276298220188511@atlanta.example.com"),
    ]);

    let msg = create_request(metadata, headers, INVITE_SDP_BASE64).unwrap();
    assert_eq!(values(&msg, "CSeq"), ["1 INVITE"]);

    let parsed = unmarshal(&msg.encode().unwrap()).unwrap();
    assert_eq!(parsed, msg);
}

#[test]
fn factory_rejects_invalid_body() {
    let metadata = Metadata::from([("version", "SIP/2.0"), ("code", "200"), ("reason", "OK")]);
    let headers = unmarshal(OK_RESPONSE).unwrap().headers().clone();

    let result = create_response(metadata, headers, "SGVsbG8gV29ybGQ=====");
    assert!(matches!(result, Err(Error::InvalidBody(_))));
}

#[test]
fn parsed_message_may_lack_factory_headers() {
    let msg = unmarshal(b"OPTIONS sip:carol@chicago.com SIP/2.0\r\nAccept: application/sdp\r\n\r\n").unwrap();
    let (kind, metadata, headers, body) = msg.into_parts();

    assert_eq!(kind, Kind::Request);
    assert!(!headers.contains("Via"));
    let err = create_request(metadata, headers, &body.to_base64()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredHeader);
}
