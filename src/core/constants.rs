// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 100;
pub const DEFAULT_EXPLORE_DELAY_MS: u64 = 1000;

// Starting character
pub const DEFAULT_PLAYER_NAME: &str = "Adventurer";
pub const STARTING_HP: i32 = 100;
pub const STARTING_ATTACK: i32 = 15;
pub const STARTING_XP_TO_NEXT_LEVEL: u32 = 100;
pub const STARTING_UPGRADE_PRICE: u32 = 50;

// Items
pub const HEALING_POTION: &str = "Healing Potion";
pub const SWORD_UPGRADE: &str = "Sword Upgrade";
pub const DEFAULT_POTION_PRICE: u32 = 20;
pub const POTION_HEAL_FRACTION: f64 = 0.4;
pub const POTION_DROP_CHANCE: f64 = 0.1;
pub const SWORD_UPGRADE_ATTACK: i32 = 5;
pub const UPGRADE_PRICE_GROWTH: f64 = 1.5;

// Combat rolls
pub const PLAYER_DAMAGE_ROLL_MAX: i32 = 5;
pub const ENEMY_DAMAGE_ROLL_MAX: i32 = 3;
pub const POISON_DAMAGE_PER_TURN: i32 = 3;
pub const FLEE_SUCCESS_THRESHOLD: f64 = 0.5;
pub const FLEE_FAILURE_DAMAGE: i32 = 10;
pub const REGENERATE_FRACTION: f64 = 0.05;

// Monster scaling per player level above 1
pub const MONSTER_HP_PER_LEVEL: i32 = 15;
pub const MONSTER_ATTACK_PER_LEVEL: i32 = 5;

// Leveling
pub const LEVEL_UP_MAX_HP: i32 = 20;
pub const LEVEL_UP_ATTACK: i32 = 5;
pub const XP_PER_LEVEL: u32 = 100;
pub const XP_LEVEL_OFFSET: u32 = 50;

// Save bounds
pub const MAX_PLAYER_LEVEL: u32 = 1_000;
pub const MAX_PLAYER_STAT: i32 = 1_000_000;
pub const MAX_GOLD: u32 = 1_000_000_000;
pub const MAX_XP: u32 = 1_000_000_000;

// Difficulty
pub const DEFAULT_DIFFICULTY: &str = "Normal";

// Log
pub const COMBAT_LOG_CAPACITY: usize = 50;

// Persistence
pub const SAVE_FILE_NAME: &str = "save.json";
