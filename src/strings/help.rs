//! # Help Text
//!
//! Help messages for bot commands.
//! Displayed to the user via the `.help` command.

pub const MAIN: &str = concat!(
    "**🎮 Steam Hub Help**\n",
    "Use: .command _args_\n",
    "\n",
    "**👤 Player**\n",
    "* profile [player]: Account summary\n",
    "* friends [player]: Oldest friends, newest friend and friend count\n",
    "\n",
    "_[player]_ can be a SteamID64, STEAM_0:X:Y, [U:1:N], a profile URL or a custom URL name.\n",
    "\n",
    "**⚡ Misc**\n",
    "* help\n"
);
