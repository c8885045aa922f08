//! Parse an INVITE, inspect it, and re-encode it in canonical header order

use sipcodec::{Message, Uri};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let wire = b"INVITE sip:bob@biloxi.com SIP/2.0\r\n\
        Via: SIP/2.0/UDP pc33.atlanta.com;branch=z9hG4bK776asdhds\r\n\
        Max-Forwards: 70\r\n\
        To: Bob <sip:bob@biloxi.com>\r\n\
        From: Alice <sip:alice@atlanta.com>;tag=1928301774\r\n\
        Call-ID: a84b4c76e66710\r\n\
        CSeq: 314159 INVITE\r\n\
        Route: <sip:proxy.atlanta.com;lr>,<sip:proxy2.atlanta.com;lr>\r\n\
        Content-Type: text/plain\r\n\
        Content-Length: 5\r\n\r\n\
        hello";

    let msg = Message::decode(wire)?;
    println!("kind={} method={:?}", msg.kind(), msg.method());

    for (name, values) in msg.headers() {
        println!("  {name}: {values:?}");
    }
    println!("body (base64) = {}", msg.body_base64());

    if let Some(target) = msg.metadata().get("uri") {
        let uri: Uri = target.parse()?;
        println!("request-uri user={:?} host={}", uri.user, uri.host);
    }

    let encoded = msg.encode()?;
    println!("\n{}", String::from_utf8_lossy(&encoded));

    Ok(())
}
