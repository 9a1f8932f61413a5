//! Static fact tables driving the collectors: package taxonomy, service
//! names, marker paths, and filter terms. Kept as data so the probe logic
//! stays generic.

/// Package categories and their candidate package names. Category keys are
/// already lowercased for the wire format; candidate order is the order
/// packages appear in the report.
pub const PACKAGE_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "core_os_utilities",
        &[
            "waybar",
            "udiskie",
            "pavucontrol",
            "wttr",
            "hyprland",
            "hyprlock",
            "hypridle",
            "hyprpicker",
            "hyprcursor",
            "nwg-look",
            "yay",
            "flatpak",
            "pcmanfm",
            "lf",
            "engrampa",
            "xdg-desktop-portal-hyprland",
        ],
    ),
    (
        "extra_utilities",
        &[
            "btop",
            "neofetch",
            "bottles",
            "wine",
            "helvum",
            "wineasio",
            "latencyflex",
        ],
    ),
    ("web_browsers", &["brave", "qutebrowser"]),
    ("text_editors", &["cursor", "neovim"]),
    ("launchers", &["steam", "lutris"]),
    (
        "applications",
        &["spotify", "vesktop", "davinci-resolve", "touchdesigner"],
    ),
];

/// Pacman manifest files read before falling back to `pacman -Q`.
pub const PACKAGE_MANIFESTS: &[&str] = &[
    "/etc/pacman.d/lists/pkglist.txt",
    "/etc/pacman.d/lists/foreignpkglist.txt",
];

/// Display managers checked in order; first active unit wins.
pub const DISPLAY_MANAGERS: &[(&str, &str)] = &[
    ("ly", "Ly"),
    ("lightdm", "LightDM"),
    ("gdm", "GDM"),
    ("sddm", "SDDM"),
    ("lxdm", "LXDM"),
];

/// Bootloader marker paths checked in order; first existing path wins.
pub const BOOTLOADER_MARKERS: &[(&str, &str)] = &[
    ("/boot/grub/grub.cfg", "GRUB"),
    ("/boot/loader/loader.conf", "systemd-boot"),
    ("/boot/refind/refind.conf", "rEFInd"),
];

/// Fonts whose family name contains one of these terms are dropped as
/// common/bundled system fonts.
pub const FONT_EXCLUDE_TERMS: &[&str] = &["noto", "liberation", "dejavu", "ubuntu"];

/// Of the remaining fonts, only families matching one of these terms are
/// reported. Curation, not enumeration.
pub const FONT_ALLOW_TERMS: &[&str] = &["jetbrains", "fira", "hack", "source", "roboto", "inter"];

/// System-wide GTK theme directory. The per-user counterpart is `~/.themes`.
pub const SYSTEM_THEME_DIR: &str = "/usr/share/themes";

/// System-wide icon directory (also hosts cursor themes). Per-user
/// counterpart is `~/.icons`.
pub const SYSTEM_ICON_DIR: &str = "/usr/share/icons";

/// GSettings schema holding the desktop interface appearance keys.
pub const INTERFACE_SCHEMA: &str = "org.gnome.desktop.interface";

/// Shell assigned to accounts that cannot log in; such accounts are not
/// reported as users even when their uid is in the human range.
pub const NOLOGIN_SHELL: &str = "/usr/sbin/nologin";

/// Conventional lower bound of human account uids on this platform family.
pub const FIRST_HUMAN_UID: u32 = 1000;
