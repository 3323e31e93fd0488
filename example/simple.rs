use msglint::prelude::*;

fn main() {
    let declarations = vec![
        Declaration::builder()
            .name("connected")
            .parameter_count(2)
            .message_tag(true)
            .format_string("connected to %s:%d")
            .build(),
        Declaration::builder()
            .name("connected")
            .parameter_count(2)
            .message_tag(true)
            .format_string("connected to {0} on port {1}")
            .format_kind(FormatKind::MessagePattern)
            .build(),
        Declaration::builder()
            .name("closed")
            .parameter_count(0)
            .message_tag(true)
            .format_string("closed after {0} ms")
            .format_kind(FormatKind::MessagePattern)
            .build(),
    ];

    let findings = MessageValidator::default().validate("net.Connection", &declarations);
    for finding in &findings {
        println!("net.Connection::{}", finding);
    }
}
