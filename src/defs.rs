use crate::DicePool;

pub const D2: DicePool = DicePool::preset(2);
pub const D3: DicePool = DicePool::preset(3);
pub const D4: DicePool = DicePool::preset(4);
pub const D6: DicePool = DicePool::preset(6);
pub const D8: DicePool = DicePool::preset(8);
pub const D10: DicePool = DicePool::preset(10);
pub const D12: DicePool = DicePool::preset(12);
pub const D20: DicePool = DicePool::preset(20);
pub const D100: DicePool = DicePool::preset(100);

pub fn d2() -> DicePool {
    D2
}

pub fn d3() -> DicePool {
    D3
}

pub fn d4() -> DicePool {
    D4
}

pub fn d6() -> DicePool {
    D6
}

pub fn d8() -> DicePool {
    D8
}

pub fn d10() -> DicePool {
    D10
}

pub fn d12() -> DicePool {
    D12
}

pub fn d20() -> DicePool {
    D20
}

pub fn d100() -> DicePool {
    D100
}
