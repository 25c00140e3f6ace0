//! End-to-end session lifecycle tests over the mock transport

use glove_io::transport::MockTransport;
use glove_io::{Error, GloveConfig, GloveSession};

fn glove18_session() -> (GloveSession, MockTransport) {
    let mut session = GloveSession::new(GloveConfig::glove18()).unwrap();
    let mock = MockTransport::new();
    session.start_with_transport(mock.clone()).unwrap();
    (session, mock)
}

#[test]
fn read_before_start_fails() {
    let mut session = GloveSession::new(GloveConfig::glove18()).unwrap();
    assert!(!session.is_started());
    assert!(matches!(session.read(), Err(Error::NotStarted)));
}

#[test]
fn start_then_stop_releases_the_transport() {
    let (mut session, _mock) = glove18_session();
    assert!(session.is_started());

    session.stop().unwrap();
    assert!(!session.is_started());
}

#[test]
fn read_after_stop_fails() {
    let (mut session, mock) = glove18_session();
    mock.inject_read(&[0u8; 18]);
    session.stop().unwrap();

    assert!(matches!(session.read(), Err(Error::NotStarted)));
}

#[test]
fn stop_twice_is_a_no_op() {
    let (mut session, _mock) = glove18_session();
    session.stop().unwrap();
    session.stop().unwrap();
}

#[test]
fn full_frame_decodes_to_injected_bytes() {
    let (mut session, mock) = glove18_session();
    let response: Vec<u8> = (0u8..18).collect();
    mock.inject_read(&response);

    let frames = session.read().unwrap();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].len(), 18);
    assert_eq!(frames[0].values(), response.as_slice());

    // The read was driven by exactly one request byte
    assert_eq!(mock.get_written(), vec![b'G']);
}

#[test]
fn short_response_times_out() {
    let (mut session, mock) = glove18_session();
    mock.inject_read(&[1, 2, 3]);

    assert!(matches!(session.read(), Err(Error::Timeout { .. })));
}

#[test]
fn timed_out_read_leaves_session_usable() {
    let (mut session, mock) = glove18_session();
    mock.inject_read(&[1, 2, 3]);
    assert!(session.read().is_err());

    // The next full response still reads cleanly
    mock.clear_read();
    mock.inject_read(&[7u8; 18]);
    let frames = session.read().unwrap();
    assert_eq!(frames[0].values(), &[7u8; 18]);
}

#[test]
fn batched_read_returns_one_frame_per_sample() {
    let config = GloveConfig {
        samples_per_read: 3,
        ..GloveConfig::glove18()
    };
    let mut session = GloveSession::new(config).unwrap();
    let mock = MockTransport::new();
    session.start_with_transport(mock.clone()).unwrap();

    mock.inject_read(&[0u8; 18]);
    mock.inject_read(&[1u8; 18]);
    mock.inject_read(&[2u8; 18]);

    let frames = session.read().unwrap();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0].values(), &[0u8; 18]);
    assert_eq!(frames[1].values(), &[1u8; 18]);
    assert_eq!(frames[2].values(), &[2u8; 18]);
    assert_eq!(mock.get_written(), vec![b'G', b'G', b'G']);
}

#[test]
fn restart_after_stop_serves_reads_again() {
    let (mut session, _mock) = glove18_session();
    session.stop().unwrap();

    let mock = MockTransport::new();
    session.start_with_transport(mock.clone()).unwrap();
    mock.inject_read(&[42u8; 18]);

    let frames = session.read().unwrap();
    assert_eq!(frames[0].values(), &[42u8; 18]);
}

#[test]
fn glove22_frames_have_22_channels() {
    let config = GloveConfig::glove22();
    let mut session = GloveSession::new(config).unwrap();
    let mock = MockTransport::new();
    session.start_with_transport(mock.clone()).unwrap();

    let response: Vec<u8> = (100u8..122).collect();
    mock.inject_read(&response);

    let frames = session.read().unwrap();
    assert_eq!(frames[0].len(), 22);
    assert_eq!(frames[0].values(), response.as_slice());
}
