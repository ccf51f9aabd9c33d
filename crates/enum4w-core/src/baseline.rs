//! Compiled-in baseline lists used to filter out ordinary results.

/// Accounts that ship with common distributions and service packages.
pub const DEFAULT_ACCOUNTS: &[&str] = &[
    "daemon",
    "shutdown",
    "operator",
    "halt",
    "bin",
    "sys",
    "sync",
    "games",
    "man",
    "lp",
    "mail",
    "news",
    "uucp",
    "proxy",
    "backup",
    "list",
    "irc",
    "gnats",
    "nobody",
    "_apt",
    "systemd-network",
    "systemd-resolve",
    "systemd-timesync",
    "messagebus",
    "tss",
    "strongswan",
    "tcpdump",
    "usbmux",
    "sshd",
    "dnsmasq",
    "avahi",
    "rtkit",
    "speech-dispatcher",
    "nm-openvpn",
    "nm-openconnect",
    "lightdm",
    "pulse",
    "saned",
    "colord",
    "stunnel4",
    "geoclue",
    "redsocks",
    "rwhod",
    "iodine",
    "miredo",
    "statd",
    "inetsim",
    "king-phisher",
    "vboxadd",
    "ntpsec",
    "Debian-snmp",
    "sslh",
    "_rpc",
    "systemd-oom",
    "polkitd",
    "systemd-coredump",
];

/// Entries normally found directly under `/` (lowercase).
pub const EXPECTED_ROOT_ENTRIES: &[&str] = &[
    "run",
    "mnt",
    "root",
    "sbin",
    "lib64",
    "sys",
    "lib",
    "lost+found",
    "home",
    "proc",
    "tmp",
    "media",
    "bin",
    "boot",
    "srv",
    "lib32",
    "usr",
    "opt",
    "var",
    "libx32",
    "etc",
    "initrd.img",
    "vmlinuz",
    "dev",
    "initrd.img.old",
    "vmlinuz.old",
    "afs",
];

/// Root entries worth calling out on their own (lowercase).
pub const INTERESTING_ROOT_ENTRIES: &[&str] = &[DOCKER_MARKER];

/// File Docker drops at the root of every container.
pub const DOCKER_MARKER: &str = ".dockerenv";

/// Home subfolders that carry no signal while empty.
pub const BORING_IF_EMPTY: &[&str] = &[
    "Desktop",
    "Documents",
    "Downloads",
    "Videos",
    "Music",
    "Pictures",
    "Public",
    "Templates",
];

/// Home subfolders that hold credentials.
pub const CREDENTIAL_DIRS: &[&str] = &[".ssh"];

/// Returns true if `name` is one of the default accounts.
#[must_use]
pub fn is_default_account(name: &str) -> bool {
    DEFAULT_ACCOUNTS.contains(&name)
}

/// Returns true if `name` is an expected root entry, ignoring case.
#[must_use]
pub fn is_expected_root_entry(name: &str) -> bool {
    EXPECTED_ROOT_ENTRIES.contains(&name.to_lowercase().as_str())
}

/// Returns true if `name` is an interesting root entry, ignoring case.
#[must_use]
pub fn is_interesting_root_entry(name: &str) -> bool {
    INTERESTING_ROOT_ENTRIES.contains(&name.to_lowercase().as_str())
}
