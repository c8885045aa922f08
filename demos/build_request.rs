//! Build a REGISTER with the request factory and print its wire form

use sipcodec::uri::{self, Uri};
use sipcodec::{Headers, Metadata, create_request};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registrar = Uri::new("sip", "registrar.biloxi.com");
    let contact = Uri::new("sip", "192.0.2.4").with_user("bob").with_port(5060);

    let metadata = Metadata::from([
        ("method", "REGISTER".to_owned()),
        ("uri", uri::marshal(Some(&registrar))?),
        ("version", "SIP/2.0".to_owned()),
    ]);

    let mut headers = Headers::new();
    headers.append("Via", "SIP/2.0/UDP bobspc.biloxi.com:5060;branch=z9hG4bKnashds7");
    headers.append("Max-Forwards", "70");
    headers.append("To", "Bob <sip:bob@biloxi.com>");
    headers.append("From", "Bob <sip:bob@biloxi.com>;tag=456248");
    headers.append("Call-ID", "843817637684230@998sdasdh09");
    headers.append("Contact", format!("<{contact}>"));
    headers.append("Content-Length", "0");

    // CSeq is generated as "1 REGISTER"
    let request = create_request(metadata, headers, "")?;

    print!("{}", String::from_utf8_lossy(&request.encode()?));

    Ok(())
}
