/// Skip a test if AWS credentials or the test parameter are not configured.
#[macro_export]
macro_rules! skip_without_aws {
    () => {
        if std::env::var("AWS_ACCESS_KEY_ID").is_err() && std::env::var("AWS_PROFILE").is_err() {
            eprintln!("SKIPPED: no AWS credentials (AWS_ACCESS_KEY_ID or AWS_PROFILE)");
            return;
        }
        if std::env::var("AWSENV_TEST_PARAMETER").is_err() {
            eprintln!("SKIPPED: AWSENV_TEST_PARAMETER not set (set to an SSM parameter name)");
            return;
        }
    };
}
