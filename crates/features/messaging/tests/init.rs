use herald_domain::config::MessagingConfig;
use herald_messaging::{BufferedConsole, Messaging, MessagingError, init};
use std::sync::Arc;

#[test]
fn init_creates_slice_with_both_bindings() {
    let out = Arc::new(BufferedConsole::new());
    let slice = init(&MessagingConfig::default(), out.clone()).expect("init should succeed");
    assert_eq!(slice.id, std::any::TypeId::of::<Messaging>());

    let messaging = slice.downcast_ref::<Messaging>().expect("slice type");
    assert_eq!(messaging.bindings.primary.send(), "Message sent!");
    assert_eq!(messaging.bindings.qualified.send(), "Message sent!");
    assert_eq!(out.lines(), ["Email sent: Hello!", "SMS sent: Hello!"]);
}

#[test]
fn qualifier_may_name_the_primary_sender() {
    let config = MessagingConfig { qualifier: "emailService".to_owned() };
    let slice = init(&config, Arc::new(BufferedConsole::new())).expect("init should succeed");
    let messaging = slice.downcast_ref::<Messaging>().expect("slice type");

    assert_eq!(messaging.bindings.qualified.channel(), "email");
}

#[test]
fn mistyped_qualifier_fails_init() {
    let out = Arc::new(BufferedConsole::new());
    let config = MessagingConfig { qualifier: "SMSService".to_owned() };
    let err = init(&config, out.clone()).expect_err("unregistered qualifier must fail");

    assert!(matches!(err, MessagingError::UnknownQualifier { .. }));
    assert!(out.is_empty(), "nothing may be sent while wiring fails");
}

#[test]
fn repeated_sends_are_idempotent() {
    let out = Arc::new(BufferedConsole::new());
    let slice = init(&MessagingConfig::default(), out.clone()).expect("init");
    let messaging = slice.downcast_ref::<Messaging>().expect("slice type");

    for n in 1..=5 {
        assert_eq!(messaging.bindings.qualified.send(), "Message sent!");
        assert_eq!(out.count("SMS sent: Hello!"), n);
    }
    assert_eq!(out.count("Email sent: Hello!"), 0);
}

#[test]
fn concurrent_sends_each_write_one_line() {
    let out = Arc::new(BufferedConsole::new());
    let slice = init(&MessagingConfig::default(), out.clone()).expect("init");
    let messaging = slice.downcast_ref::<Messaging>().expect("slice type").clone();

    std::thread::scope(|scope| {
        for _ in 0..16 {
            let messaging = messaging.clone();
            scope.spawn(move || assert_eq!(messaging.bindings.primary.send(), "Message sent!"));
        }
    });

    assert_eq!(out.count("Email sent: Hello!"), 16);
    assert_eq!(out.len(), 16);
}
