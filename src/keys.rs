/// Maps a canonical field name to the ssh_config keyword it is written as.
///
/// Only the exact lower-case names below are translated; anything else is
/// written out under its own spelling.
pub fn translate_key(key: &str) -> &str {
    match key {
        "user" => "User",
        "identityfile" => "IdentityFile",
        "proxycommand" => "ProxyCommand",
        "ip" | "hostname" => "Hostname",
        "port" => "Port",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_are_translated() {
        assert_eq!(translate_key("user"), "User");
        assert_eq!(translate_key("identityfile"), "IdentityFile");
        assert_eq!(translate_key("proxycommand"), "ProxyCommand");
        assert_eq!(translate_key("port"), "Port");
    }

    #[test]
    fn ip_and_hostname_share_a_keyword() {
        assert_eq!(translate_key("ip"), "Hostname");
        assert_eq!(translate_key("hostname"), "Hostname");
    }

    #[test]
    fn unknown_keys_pass_through_untouched() {
        assert_eq!(translate_key("ForwardAgent"), "ForwardAgent");
        assert_eq!(translate_key("serveraliveinterval"), "serveraliveinterval");
        // matching is case-sensitive
        assert_eq!(translate_key("User"), "User");
        assert_eq!(translate_key("USER"), "USER");
    }
}
