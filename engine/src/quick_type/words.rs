/// Vocabulary for the Quick Type Challenge.
pub const WORDS: &[&str] = &[
    "python", "challenge", "construction", "random", "visitor", "type", "coming", "soon",
    "keyboard", "game", "future", "window", "panel", "refresh", "clean", "purge", "clear",
    "remove", "wipe", "trace", "record", "timeline", "entry", "log", "activity", "memory",
    "footprint", "cycle", "reload", "interface", "tab", "workspace", "session", "user", "input",
    "output", "list", "manage", "organize", "control", "monitor", "overview", "details",
    "summary", "reset", "update", "start", "stop", "pause", "resume", "launch", "terminate",
    "close", "open", "switch", "toggle", "access", "entrypoint", "navigation", "route", "address",
    "location", "field", "search", "filter", "sort", "arrange", "queue", "stack", "recent",
    "previous", "next", "forward", "back", "gecko", "undo", "redo", "action", "operation",
    "event", "process", "routine", "task", "job", "schedule", "plan", "execute", "run", "flow",
    "track", "scan", "analyze", "blink", "inspect", "review", "audit", "status", "state", "mode",
    "option", "setting", "preference", "tool", "utility", "assist", "guide", "help", "support",
    "info", "data", "recording", "logbook", "archive", "snapshot", "instance", "profile",
    "identity", "avatar", "guest", "member", "participant", "actor", "role", "permission",
    "homepage",
];
