use nxstage_util::errors::{StagingError, EXIT_CARDINALITY, EXIT_FAILURE};

#[test]
fn test_config_error_display() {
    let err = StagingError::Config {
        message: "NEXUS_USERNAME is not set".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Configuration error: NEXUS_USERNAME is not set"
    );
}

#[test]
fn test_transport_error_display() {
    let err = StagingError::Transport {
        message: "connection refused".to_string(),
    };
    assert_eq!(err.to_string(), "Network error: connection refused");
}

#[test]
fn test_protocol_error_display() {
    let err = StagingError::Protocol {
        status: 401,
        url: "https://oss.sonatype.org/service/local/staging/profile_repositories".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "HTTP 401 from https://oss.sonatype.org/service/local/staging/profile_repositories"
    );
}

#[test]
fn test_data_error_display() {
    let err = StagingError::Data {
        message: "missing field `data`".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid staging response: missing field `data`"
    );
}

#[test]
fn test_cardinality_error_is_single_line() {
    let err = StagingError::Cardinality { count: 2 };
    let msg = err.to_string();
    assert!(msg.starts_with("Zero or more than one staging repository"));
    assert!(msg.contains("found 2"), "got: {msg}");
    assert!(!msg.contains('\n'));
}

#[test]
fn test_exit_codes() {
    assert_eq!(StagingError::Cardinality { count: 0 }.exit_code(), EXIT_CARDINALITY);
    assert_eq!(EXIT_CARDINALITY, 1);

    let others = [
        StagingError::Config {
            message: String::new(),
        },
        StagingError::Transport {
            message: String::new(),
        },
        StagingError::Protocol {
            status: 500,
            url: String::new(),
        },
        StagingError::Data {
            message: String::new(),
        },
    ];
    for err in &others {
        assert_eq!(err.exit_code(), EXIT_FAILURE, "{err}");
    }
    assert_ne!(EXIT_FAILURE, 0);
}
