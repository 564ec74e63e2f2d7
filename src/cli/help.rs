pub const TOP_LONG_ABOUT: &str = "winback inspects this machine for the backup left behind by an in-place Windows upgrade, reports whether the 10-day rollback window is still open, and can open Recovery settings for you.\n\nIt never modifies the system: the actual rollback is performed by Windows itself from Settings -> System -> Recovery.";

pub const TOP_AFTER_HELP: &str = "EXAMPLES:\n  winback check\n  winback check --days 30\n  winback check --yes\n  winback open\n\nROLLBACK WINDOW:\n  Windows keeps the previous installation in C:\\Windows.old for 10 days\n  after an upgrade. Within that window, Settings offers \"Go back\".\n  After it, a clean installation is the only way back.";

pub const CHECK_LONG_ABOUT: &str = "Check whether a version rollback is still possible on this machine.\n\nThe check is driven by one signal: the backup-of-previous-install\ndirectory (C:\\Windows.old by default). Its creation time decides whether\nthe rollback window (10 days by default) is still open.\n\nNote: the directory existing is reported as \"available\" even when the\nwindow has expired; Windows may still refuse the revert.";

pub const CHECK_AFTER_HELP: &str = "EXAMPLES:\n  winback check\n  winback check --dir D:\\Windows.old\n  winback check --days 30\n  winback check --yes\n\nPROMPT:\n  When the backup directory exists you are asked whether to open\n  Recovery settings. Only \"y\"/\"Y\" opens them; anything else prints\n  the manual steps instead. --yes skips the question.";

pub const OPEN_AFTER_HELP: &str = "EXAMPLE:\n  winback open\n\nOpens the ms-settings:recovery deep link. If that fails, the manual\nsteps (Windows Key + I -> System -> Recovery) are printed instead.";
