use remoteconf::{Config, Error, HostEnvironment, Platform};
use std::env;
use std::path::PathBuf;

// Only test in this binary: it mutates the process environment.
#[test]
fn test_detect_reads_process_variables() {
    let saved_home = env::var_os("HOME");
    let saved_profile = env::var_os("USERPROFILE");
    let saved_appdata = env::var_os("APPDATA");
    let home_var = match Platform::current() {
        Platform::Windows => "USERPROFILE",
        Platform::Unix => "HOME",
    };

    // Set variables are picked up
    env::set_var(home_var, "/home/u");
    env::set_var("APPDATA", "/home/u/appdata");
    let detected = HostEnvironment::detect();
    assert_eq!(detected.platform, Platform::current());
    assert_eq!(detected.home_dir, Some(PathBuf::from("/home/u")));
    assert_eq!(detected.app_data_dir, Some(PathBuf::from("/home/u/appdata")));

    // Empty values count as missing
    env::set_var(home_var, "");
    env::set_var("APPDATA", "");
    let detected = HostEnvironment::detect();
    assert_eq!(detected.home_dir, None);
    assert_eq!(detected.app_data_dir, None);

    // Removed variables are not looked up anywhere else
    env::remove_var(home_var);
    env::remove_var("APPDATA");
    let detected = HostEnvironment::detect();
    assert_eq!(detected.home_dir, None);
    assert_eq!(detected.app_data_dir, None);

    let expected_variable = match Platform::current() {
        Platform::Windows => "APPDATA",
        Platform::Unix => "HOME",
    };
    let err = Config::new(&detected).err().expect("resolution should fail");
    assert!(matches!(err, Error::ConfigPath { variable } if variable == expected_variable));

    // Restore
    for (name, value) in [
        ("HOME", saved_home),
        ("USERPROFILE", saved_profile),
        ("APPDATA", saved_appdata),
    ] {
        match value {
            Some(value) => env::set_var(name, value),
            None => env::remove_var(name),
        }
    }
}
