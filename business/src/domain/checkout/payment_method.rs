use std::fmt;
use std::str::FromStr;

/// How a payment method is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentCategory {
    CashOnDelivery,
    DigitalWallet,
    BankBranch,
}

impl PaymentCategory {
    pub const ALL: [PaymentCategory; 3] = [
        PaymentCategory::CashOnDelivery,
        PaymentCategory::DigitalWallet,
        PaymentCategory::BankBranch,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            PaymentCategory::CashOnDelivery => "cash_on_delivery",
            PaymentCategory::DigitalWallet => "digital_wallet",
            PaymentCategory::BankBranch => "bank_branch",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PaymentCategory::CashOnDelivery => "Cash-on Delivery",
            PaymentCategory::DigitalWallet => "Digital Wallet",
            PaymentCategory::BankBranch => "Branch Payment",
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            PaymentCategory::CashOnDelivery => "Pay when your order arrives",
            PaymentCategory::DigitalWallet => "Mobile payment solution",
            PaymentCategory::BankBranch => "Bank branch payment",
        }
    }

    /// Methods of this category in menu order.
    pub fn methods(self) -> impl Iterator<Item = PaymentMethod> {
        PaymentMethod::ALL
            .into_iter()
            .filter(move |method| method.category() == self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    Cash,
    TeleBirr,
    CbeBirr,
    MPesa,
    HelloCash,
    Amole,
    Kacha,
    Chapa,
    Cbe,
    Awash,
    Abyssinia,
    Dashen,
    Nib,
    Wegagen,
    Zemen,
    Bunna,
    Coop,
}

/// Display data for one payment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentMethodInfo {
    pub tag: &'static str,
    pub display_name: &'static str,
    /// Short badge shown in place of a logo.
    pub icon: &'static str,
    pub category: PaymentCategory,
}

const fn info(
    tag: &'static str,
    display_name: &'static str,
    icon: &'static str,
    category: PaymentCategory,
) -> PaymentMethodInfo {
    PaymentMethodInfo {
        tag,
        display_name,
        icon,
        category,
    }
}

use PaymentCategory::{BankBranch, CashOnDelivery, DigitalWallet};

// Indexed by `PaymentMethod as usize`.
const PAYMENT_METHODS: [PaymentMethodInfo; 17] = [
    info("cash", "Cash-on Delivery", "$", CashOnDelivery),
    info("tele-birr", "Tele-Birr", "TB", DigitalWallet),
    info("cbe-birr", "CBE-Birr", "CB", DigitalWallet),
    info("m-pesa", "M-Pesa", "MP", DigitalWallet),
    info("hello-cash", "HelloCash Wegagen", "H", DigitalWallet),
    info("amole", "Amole Digital Wallet", "A", DigitalWallet),
    info("kacha", "Kacha Digital Wallet", "K", DigitalWallet),
    info("chapa", "Chapa Payment", "C", DigitalWallet),
    info("cbe", "Commercial Bank of Ethiopia", "CBE", BankBranch),
    info("awash", "Awash Bank", "A", BankBranch),
    info("abyssinia", "Bank of Abyssinia", "★", BankBranch),
    info("dashen", "Dashen Bank", "D", BankBranch),
    info("nib", "Nib International Bank", "N", BankBranch),
    info("wegagen", "Wegagen Bank", "W", BankBranch),
    info("zemen", "Zemen Bank", "Z", BankBranch),
    info("bunna", "Bunna Bank", "B", BankBranch),
    info("coop", "Cooperative Bank of Oromia", "C", BankBranch),
];

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 17] = [
        PaymentMethod::Cash,
        PaymentMethod::TeleBirr,
        PaymentMethod::CbeBirr,
        PaymentMethod::MPesa,
        PaymentMethod::HelloCash,
        PaymentMethod::Amole,
        PaymentMethod::Kacha,
        PaymentMethod::Chapa,
        PaymentMethod::Cbe,
        PaymentMethod::Awash,
        PaymentMethod::Abyssinia,
        PaymentMethod::Dashen,
        PaymentMethod::Nib,
        PaymentMethod::Wegagen,
        PaymentMethod::Zemen,
        PaymentMethod::Bunna,
        PaymentMethod::Coop,
    ];

    pub fn info(self) -> &'static PaymentMethodInfo {
        &PAYMENT_METHODS[self as usize]
    }

    pub fn tag(self) -> &'static str {
        self.info().tag
    }

    pub fn display_name(self) -> &'static str {
        self.info().display_name
    }

    pub fn icon(self) -> &'static str {
        self.info().icon
    }

    pub fn category(self) -> PaymentCategory {
        self.info().category
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("checkout.unknown_payment_method")]
pub struct UnknownPaymentMethod;

impl FromStr for PaymentMethod {
    type Err = UnknownPaymentMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|method| method.tag() == s)
            .ok_or(UnknownPaymentMethod)
    }
}
